use std::net::{IpAddr, Ipv4Addr};

use super::Config;

#[test]
fn config_default_binds_all_interfaces() {
    let config = Config::default();
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.port, 8000);
}
