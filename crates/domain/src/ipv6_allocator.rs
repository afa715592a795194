use std::collections::BTreeSet;
use std::net::Ipv6Addr;

use ipnetwork::Ipv6Network;

use crate::errors::DomainError;

/// Prefix bits added to a VPC block when carving subnet blocks: a /56 VPC
/// block yields /64 subnet blocks.
pub const SUBNET_PREFIX_STEP: u8 = 8;

/// Hands out the fixed-length children of a VPC IPv6 block in ascending
/// address order.
///
/// Children already claimed (blocks held by existing subnet assignments)
/// are skipped, so allocation after a partial earlier run can never return
/// a block that overlaps one a sibling subnet already holds.
pub struct SubnetBlockAllocator {
    parent: Ipv6Network,
    child_prefix: u8,
    child_count: u128,
    claimed: BTreeSet<u128>,
}

impl SubnetBlockAllocator {
    pub fn new(parent: Ipv6Network) -> Result<Self, DomainError> {
        Self::with_prefix_step(parent, SUBNET_PREFIX_STEP)
    }

    pub fn with_prefix_step(parent: Ipv6Network, step: u8) -> Result<Self, DomainError> {
        let child_prefix = parent.prefix() as u32 + step as u32;
        let child_count = match 1u128.checked_shl(step as u32) {
            Some(count) if step > 0 && child_prefix <= 128 => count,
            _ => {
                return Err(DomainError::AllocationExhausted(format!(
                    "{parent} cannot be partitioned into /{child_prefix} blocks"
                )))
            }
        };

        Ok(Self {
            parent,
            child_prefix: child_prefix as u8,
            child_count,
            claimed: BTreeSet::new(),
        })
    }

    fn stride(&self) -> u128 {
        1u128 << (128 - self.child_prefix as u32)
    }

    fn child_at(&self, index: u128) -> Result<Ipv6Network, DomainError> {
        if index >= self.child_count {
            return Err(DomainError::AllocationExhausted(format!(
                "child index {index} out of range for {} (max {})",
                self.parent,
                self.child_count - 1
            )));
        }

        let base = u128::from(self.parent.network());
        let addr = Ipv6Addr::from(base + index * self.stride());
        Ipv6Network::new(addr, self.child_prefix).map_err(|e| DomainError::InvalidCidr(e.to_string()))
    }

    /// Mark every child overlapped by `block` as taken. Blocks outside the
    /// parent cannot collide with this enumeration and are ignored.
    pub fn claim(&mut self, block: &Ipv6Network) {
        if !self.parent.contains(block.network()) {
            return;
        }

        let stride = self.stride();
        let offset = u128::from(block.network()) - u128::from(self.parent.network());
        let span = match block.prefix() {
            0 => u128::MAX,
            p => 1u128 << (128 - p as u32),
        };

        let first = offset / stride;
        let last = (offset.saturating_add(span - 1) / stride).min(self.child_count - 1);
        for index in first..=last {
            self.claimed.insert(index);
        }
    }

    /// Allocate the lowest-indexed unclaimed child.
    pub fn next_free(&mut self) -> Result<Ipv6Network, DomainError> {
        let mut index = 0u128;
        for taken in &self.claimed {
            if *taken == index {
                index += 1;
            } else if *taken > index {
                break;
            }
        }

        if index >= self.child_count {
            return Err(DomainError::AllocationExhausted(format!(
                "all {} /{} blocks of {} are assigned",
                self.child_count, self.child_prefix, self.parent
            )));
        }

        let block = self.child_at(index)?;
        self.claimed.insert(index);
        Ok(block)
    }
}
