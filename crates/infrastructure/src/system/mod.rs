pub mod icmp_prober;

pub use icmp_prober::IcmpProber;
