use super::*;

mod reserve_api_call;
