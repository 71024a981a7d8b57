pub mod error;
pub mod language;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod catalog {
    pub mod dto;
    pub mod routes;
}
pub mod recommendation {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod chat {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod cart {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod suggestion {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
