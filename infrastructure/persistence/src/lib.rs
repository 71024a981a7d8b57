pub mod db;
pub mod catalog {
    pub mod entity;
    pub mod repository;
}
pub mod kv {
    pub mod entity;
    pub mod memory;
    pub mod postgres;
    pub mod store;
}
pub mod cart {
    pub mod repository;
}
pub mod chat {
    pub mod repository;
}
pub mod suggestion {
    pub mod repository;
}
