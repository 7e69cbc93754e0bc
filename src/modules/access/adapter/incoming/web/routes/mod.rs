pub mod verify_access;
