pub mod whatsapp {
    include!("whatsapp.rs");
}
