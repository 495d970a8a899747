pub mod row;
pub mod sidebar;
pub mod table;
pub mod tabs;
