pub mod page_header;
pub mod prefill_panel;
