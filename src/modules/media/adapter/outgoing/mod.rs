pub mod object_storage_gcs;
