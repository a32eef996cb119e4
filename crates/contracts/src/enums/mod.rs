pub mod use_case_category;
