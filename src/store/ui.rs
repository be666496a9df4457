use std::sync::atomic::{AtomicBool, Ordering};

/// 界面状态：侧边栏折叠标记，不持久化
#[derive(Debug, Default)]
pub struct UiStore {
    collapsed: AtomicBool,
}

impl UiStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed.load(Ordering::Relaxed)
    }

    pub fn set_collapsed(&self, collapsed: bool) {
        self.collapsed.store(collapsed, Ordering::Relaxed);
    }

    /// 切换折叠状态，返回切换后的值
    pub fn toggle(&self) -> bool {
        !self.collapsed.fetch_xor(true, Ordering::Relaxed)
    }
}
