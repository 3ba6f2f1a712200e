//! rdpurge Infrastructure Layer
pub mod rundeck;
