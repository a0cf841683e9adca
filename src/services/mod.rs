pub mod classify_service;
pub mod help_service;
pub mod router_service;
pub mod suggest_service;
