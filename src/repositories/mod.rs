pub mod activity_log;
