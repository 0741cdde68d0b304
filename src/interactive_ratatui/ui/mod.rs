pub mod app_state;
pub mod commands;
pub mod components;
pub mod events;
pub mod notifications;
pub mod renderer;

#[cfg(test)]
mod notifications_test;
#[cfg(test)]
mod renderer_test;
