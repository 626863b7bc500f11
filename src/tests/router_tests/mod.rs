mod page_tests;
mod panel_tests;
mod upload_tests;
