mod config;
mod process_status;
mod publish;
mod session;
