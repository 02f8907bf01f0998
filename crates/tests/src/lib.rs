#[cfg(test)]
mod common;

#[cfg(test)]
mod login_flow_tests;

#[cfg(test)]
mod view_router_tests;

#[cfg(test)]
mod directory_tests;

#[cfg(test)]
mod config_tests;

#[cfg(test)]
mod request_id_tests;
