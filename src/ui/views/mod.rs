pub mod confirm;
pub mod page;
pub mod sidebar;
pub mod splash;
pub mod workspace;
