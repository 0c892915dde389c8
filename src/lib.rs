pub mod consts {
    pub mod consts;
}

pub mod database {
    pub mod store;
}

pub mod model {
    pub mod person;
    pub mod validation;
}

pub mod server {
    pub mod handlers;
    pub mod options;
    pub mod routes;
    pub mod server;
}
