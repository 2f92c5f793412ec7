mod chrome;
mod status;

pub(crate) use chrome::{render_footer, render_header};
pub(crate) use status::render_status;
