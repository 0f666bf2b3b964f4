//! Max flow over `source → pools → targets → sink`.
//!
//! The graph is small (a few dozen nodes), so capacities live in a dense
//! residual matrix and augmenting paths are found with BFS (Edmonds-Karp).

use std::collections::VecDeque;

use super::pool::SpendingPool;
use super::target::SpendingTarget;

pub struct FlowNetwork {
    residual: Vec<Vec<u32>>,
    source: usize,
    sink: usize,
    pool_start: usize,
    pool_capacities: Vec<u32>,
}

impl FlowNetwork {
    /// Node 0 is the source, then one node per pool, one per target, then the
    /// sink. Pool→target edges carry the target's demand and exist only when
    /// the pool may fund that target.
    pub fn build(pools: &[SpendingPool], targets: &[SpendingTarget]) -> Self {
        let source = 0;
        let pool_start = 1;
        let target_start = pool_start + pools.len();
        let sink = target_start + targets.len();
        let node_count = sink + 1;
        let mut residual = vec![vec![0; node_count]; node_count];

        for (i, pool) in pools.iter().enumerate() {
            let pool_node = pool_start + i;
            residual[source][pool_node] = pool.capacity;
            for (j, target) in targets.iter().enumerate() {
                if pool.can_fund(target) {
                    residual[pool_node][target_start + j] = target.demand;
                }
            }
        }
        for (j, target) in targets.iter().enumerate() {
            residual[target_start + j][sink] = target.demand;
        }

        Self {
            residual,
            source,
            sink,
            pool_start,
            pool_capacities: pools.iter().map(|pool| pool.capacity).collect(),
        }
    }

    /// Saturates the network and returns the total flow pushed.
    pub fn max_flow(&mut self) -> u64 {
        let mut flow = 0u64;
        while let Some(parent) = self.augmenting_path() {
            let mut augment = u32::MAX;
            let mut node = self.sink;
            while node != self.source {
                let prev = parent[node];
                augment = augment.min(self.residual[prev][node]);
                node = prev;
            }

            let mut node = self.sink;
            while node != self.source {
                let prev = parent[node];
                self.residual[prev][node] -= augment;
                self.residual[node][prev] += augment;
                node = prev;
            }
            flow += u64::from(augment);
        }
        flow
    }

    /// BFS parent links from source to sink, if the sink is reachable.
    fn augmenting_path(&self) -> Option<Vec<usize>> {
        let node_count = self.residual.len();
        let mut parent = vec![usize::MAX; node_count];
        parent[self.source] = self.source;
        let mut queue = VecDeque::from([self.source]);

        while let Some(node) = queue.pop_front() {
            for next in 0..node_count {
                if parent[next] == usize::MAX && self.residual[node][next] > 0 {
                    parent[next] = node;
                    if next == self.sink {
                        return Some(parent);
                    }
                    queue.push_back(next);
                }
            }
        }
        None
    }

    /// Units drawn from pool `index`: capacity minus residual on its source
    /// edge.
    pub fn pool_used(&self, index: usize) -> u32 {
        let capacity = self.pool_capacities[index];
        capacity - self.residual[self.source][self.pool_start + index]
    }
}
