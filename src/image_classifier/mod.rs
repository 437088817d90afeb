pub mod impl_demo;
#[cfg(test)]
pub mod impl_fake;
pub mod impl_remote;
pub mod impl_tract;
pub mod interface;
pub mod pipeline;
pub mod tract;

#[cfg(test)]
pub(crate) mod test;
