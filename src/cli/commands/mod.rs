pub mod fixture;
pub mod init;
