use std::io::{self, Write};
use std::net::IpAddr;

/// One address per line, in the order given.
pub fn write_addresses<W: Write>(out: &mut W, addresses: &[IpAddr]) -> io::Result<()> {
    for addr in addresses {
        writeln!(out, "{}", addr)?;
    }
    out.flush()
}
