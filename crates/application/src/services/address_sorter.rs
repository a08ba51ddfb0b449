use pingable_hosts_domain::DomainError;
use std::net::IpAddr;
use std::str::FromStr;

/// Merges per-interface harvests into one list ordered by numeric address.
///
/// Addresses are compared on their 16-byte form, IPv4 as IPv4-mapped IPv6,
/// so every IPv4 address sorts before global IPv6 addresses. Duplicates are
/// kept. Input addresses have already been probed, so an unparsable one is an
/// error rather than something to skip.
pub fn aggregate<I>(per_interface: I) -> Result<Vec<IpAddr>, DomainError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut addresses = per_interface
        .into_iter()
        .flatten()
        .map(|addr| {
            IpAddr::from_str(&addr).map_err(|_| DomainError::InvalidAddress(addr.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    addresses.sort_by_key(sort_key);
    Ok(addresses)
}

fn sort_key(addr: &IpAddr) -> [u8; 16] {
    match addr {
        IpAddr::V4(v4) => v4.to_ipv6_mapped().octets(),
        IpAddr::V6(v6) => v6.octets(),
    }
}
