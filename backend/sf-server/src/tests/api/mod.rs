mod extractors;
mod json_body;
mod product_summary_dto;
mod session_cookie;
