//! General service requests

use crate::{
    builders::header_only,
    envelope::Envelope,
    service::{general as msg, Service},
};

pub fn hello_req(envelope: &mut Envelope) {
    header_only(envelope, Service::General, msg::HELLO_REQ, 0);
}

pub fn get_status_req(envelope: &mut Envelope) {
    header_only(envelope, Service::General, msg::GET_STATUS_REQ, 0);
}

pub fn get_version_req(envelope: &mut Envelope) {
    header_only(envelope, Service::General, msg::GET_VERSION_REQ, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_requests() {
        let mut env = Envelope::new();

        hello_req(&mut env);
        assert!(env.is(Service::General, msg::HELLO_REQ));

        get_status_req(&mut env);
        assert!(env.is(Service::General, msg::GET_STATUS_REQ));

        get_version_req(&mut env);
        assert!(env.is(Service::General, msg::GET_VERSION_REQ));
        assert_eq!(env.data_length(), 0);
    }
}
