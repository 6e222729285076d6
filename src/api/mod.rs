pub mod contact_controller;
