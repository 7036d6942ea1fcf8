//! Subnet plan data model.
//!
//! A [`SubnetPlan`] holds the recomputed mask and a [`SubnetRecords`] descriptor. The
//! records themselves are generated on demand, so asking for millions of subnets costs
//! nothing until they are iterated.

use super::ipv4::{offset_addr, Ipv4};
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;

/// Addresses of one subnet in a plan.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubnetRecord {
    pub network: Ipv4Addr,
    pub first_usable: Ipv4Addr,
    pub last_usable: Ipv4Addr,
    pub broadcast: Ipv4Addr,
}

impl SubnetRecord {
    /// Derive the record for the block of `jump` addresses starting at `network`.
    pub fn at(network: Ipv4Addr, jump: u64) -> SubnetRecord {
        let jump = jump as i64;
        SubnetRecord {
            network,
            first_usable: offset_addr(network, 1),
            last_usable: offset_addr(network, jump - 2),
            broadcast: offset_addr(network, jump - 1),
        }
    }
}

/// Ordered sequence of `count` subnets, each `jump` addresses after the previous one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubnetRecords {
    start: Ipv4Addr,
    jump: u64,
    count: u64,
}

impl SubnetRecords {
    pub fn new(start: Ipv4Addr, jump: u64, count: u64) -> SubnetRecords {
        SubnetRecords { start, jump, count }
    }

    pub fn len(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The subnet at `index`, or None past the end.
    pub fn get(&self, index: u64) -> Option<SubnetRecord> {
        if index >= self.count {
            return None;
        }
        // Reduce first: index * jump can exceed i64 for very large plans.
        let step = (u128::from(index) * u128::from(self.jump)) % (1u128 << 32);
        let network = offset_addr(self.start, step as i64);
        Some(SubnetRecord::at(network, self.jump))
    }

    /// The first `max` subnets, or all of them when `max` is None.
    pub fn truncated(&self, max: Option<usize>) -> SubnetRecords {
        let count = match max {
            Some(max) => self.count.min(max as u64),
            None => self.count,
        };
        SubnetRecords { count, ..*self }
    }

    pub fn iter(&self) -> SubnetIter {
        SubnetIter {
            records: *self,
            next: 0,
        }
    }
}

impl Serialize for SubnetRecords {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl IntoIterator for SubnetRecords {
    type Item = SubnetRecord;
    type IntoIter = SubnetIter;

    fn into_iter(self) -> SubnetIter {
        self.iter()
    }
}

/// Iterator over [`SubnetRecords`].
#[derive(Debug, Clone)]
pub struct SubnetIter {
    records: SubnetRecords,
    next: u64,
}

impl Iterator for SubnetIter {
    type Item = SubnetRecord;

    fn next(&mut self) -> Option<SubnetRecord> {
        let record = self.records.get(self.next)?;
        self.next += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.count.saturating_sub(self.next);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Result of splitting a network into equally sized subnets.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetPlan {
    /// Address as entered, with the starting prefix.
    pub base: Ipv4,
    /// Number of subnets requested.
    pub subnet_count: u64,
    /// Prefix bits needed to address `subnet_count` subnets.
    pub bits_borrowed: u32,
    pub new_prefix: u8,
    pub new_mask: Ipv4Addr,
    /// Block size of each subnet, 2^(32 - new_prefix).
    pub network_jump: u64,
    /// Set when base prefix + borrowed bits went past 32 and the prefix was held at 32.
    pub prefix_capped: bool,
    pub subnets: SubnetRecords,
}

impl SubnetPlan {
    /// The "network jump" figure shown to users: block size minus 2.
    pub fn displayed_jump(&self) -> i64 {
        self.network_jump as i64 - 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subnet_record_at() {
        let r = SubnetRecord::at(Ipv4Addr::new(192, 168, 1, 64), 64);
        assert_eq!(r.first_usable, Ipv4Addr::new(192, 168, 1, 65));
        assert_eq!(r.last_usable, Ipv4Addr::new(192, 168, 1, 126));
        assert_eq!(r.broadcast, Ipv4Addr::new(192, 168, 1, 127));
    }

    #[test]
    fn test_subnet_record_single_address() {
        let ip = Ipv4Addr::new(10, 0, 0, 5);
        let r = SubnetRecord::at(ip, 1);
        assert_eq!(r.first_usable, Ipv4Addr::new(10, 0, 0, 6));
        assert_eq!(r.last_usable, Ipv4Addr::new(10, 0, 0, 4));
        assert_eq!(r.broadcast, ip);
    }

    #[test]
    fn test_records_iter_crosses_octets() {
        let records = SubnetRecords::new(Ipv4Addr::new(10, 0, 0, 128), 128, 3);
        let networks: Vec<Ipv4Addr> = records.iter().map(|r| r.network).collect();
        assert_eq!(
            networks,
            vec![
                Ipv4Addr::new(10, 0, 0, 128),
                Ipv4Addr::new(10, 0, 1, 0),
                Ipv4Addr::new(10, 0, 1, 128)
            ]
        );
        assert_eq!(records.iter().size_hint(), (3, Some(3)));
        assert!(records.get(3).is_none());
    }

    #[test]
    fn test_records_wrap_past_end_of_space() {
        let records = SubnetRecords::new(Ipv4Addr::new(255, 255, 255, 0), 256, 2);
        let last = records.get(1).unwrap();
        assert_eq!(last.network, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(last.broadcast, Ipv4Addr::new(0, 0, 0, 255));
    }

    #[test]
    fn test_records_large_index() {
        let records = SubnetRecords::new(Ipv4Addr::new(0, 0, 0, 0), 1, u64::MAX);
        let r = records.get((1 << 32) + 7).unwrap();
        assert_eq!(r.network, Ipv4Addr::new(0, 0, 0, 7));
    }

    #[test]
    fn test_records_truncated() {
        let records = SubnetRecords::new(Ipv4Addr::new(10, 0, 0, 0), 256, 1 << 40);
        assert_eq!(records.truncated(Some(3)).len(), 3);
        assert_eq!(records.truncated(None), records);
        assert_eq!(records.truncated(Some(3)).get(2), records.get(2));
        let few = SubnetRecords::new(Ipv4Addr::new(10, 0, 0, 0), 256, 2);
        assert_eq!(few.truncated(Some(5)).len(), 2);
    }

    #[test]
    fn test_records_serialize() {
        let records = SubnetRecords::new(Ipv4Addr::new(192, 168, 0, 0), 4, 1);
        let json: serde_json::Value = serde_json::to_value(records).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "network": "192.168.0.0",
                "first_usable": "192.168.0.1",
                "last_usable": "192.168.0.2",
                "broadcast": "192.168.0.3"
            }])
        );
    }
}
