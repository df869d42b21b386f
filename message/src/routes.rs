// Route path constants - single source of truth for all API paths

pub const READ: &str = "/read";
