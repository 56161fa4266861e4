pub mod repositories;
pub mod uploader;

#[cfg(test)]
pub(crate) mod fakes;
