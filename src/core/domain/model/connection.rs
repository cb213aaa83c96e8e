use crate::core::domain::value_object::{
    MonitorHost, MonitorPassword, MonitorPort, MonitorUrl, MonitorUsername,
};

/// Validated connection details for one monitoring backend.
pub struct MonitorConnection {
    host: MonitorHost,
    port: MonitorPort,
    username: MonitorUsername,
    password: MonitorPassword,
    secure: bool,
    accept_invalid_certs: bool,
    url: MonitorUrl,
}

impl MonitorConnection {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        host: MonitorHost,
        port: MonitorPort,
        username: MonitorUsername,
        password: MonitorPassword,
        secure: bool,
        accept_invalid_certs: bool,
        url: MonitorUrl,
    ) -> Self {
        Self {
            host,
            port,
            username,
            password,
            secure,
            accept_invalid_certs,
            url,
        }
    }

    pub fn host(&self) -> &MonitorHost {
        &self.host
    }

    pub fn port(&self) -> MonitorPort {
        self.port
    }

    pub fn username(&self) -> &MonitorUsername {
        &self.username
    }

    pub fn password(&self) -> &MonitorPassword {
        &self.password
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    /// The validated base URL of the status CGI directory.
    pub fn url(&self) -> &MonitorUrl {
        &self.url
    }
}
