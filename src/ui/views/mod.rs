pub mod dokkai;
pub mod level_select;
pub mod login;
