pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub mod crypto {
    pub mod auth_token;
    pub mod password;
    pub mod session_token;
}

pub mod models {
    pub mod organization;
    pub mod session;
    pub mod tcc;
    pub mod user;
}

pub mod repositories {
    pub mod directory;
    pub mod organization;
    pub mod tcc;
    pub mod user;
}

pub mod services {
    pub mod auth;
    pub mod session;
    pub mod tccs;
}

pub mod handlers {
    pub mod auth;
    pub mod dashboard;
    pub mod organizations;
    pub mod tccs;
    pub mod users;
}

pub mod middleware_layer {
    pub mod current_user;
    pub mod route_guard;
}

pub mod permissions;

pub mod validation {
    pub mod auth;
    pub mod tcc;
}
