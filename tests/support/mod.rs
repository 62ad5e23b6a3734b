#![allow(dead_code)]

pub mod http_stub;
pub mod mlwizard_env;
pub mod scripted_service;
