pub mod codes;
pub mod emit;
pub mod externals;
pub mod helper;
pub mod init;
