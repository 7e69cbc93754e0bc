pub mod admin_access_key;
