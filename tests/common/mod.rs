#![allow(dead_code)]

/// Console output shaped like a full single-threaded run of the suite
pub const FULL_OUTPUT: &str = "\
running 5 tests
test benchmark_concurrent_throughput ...
=== Benchmark 3: Concurrent Throughput ===
Clients,Ops_Per_Sec
1,812.44
5,2301.10
ok
test benchmark_latency_cdf ...
=== Benchmark 5: Latency CDF ===
Latency_us
412
388
1020
ok
test benchmark_load_balancing ...
=== Benchmark 2: Load Balancing (Key Distribution) ===
Inserting 1000 keys...
Node_ID,Key_Count
9223372036854775807,48
1152921504606846976,61
18446744073709551615,37
ok
test benchmark_replication_delay ...
=== Benchmark 4: Replication Delay ===
Trial,Delay_ms
0,3
1,2
2,4
Average Replication Delay: 3.00 ms
ok
test benchmark_scalability_hops ...
=== Benchmark 1: Scalability (Average Hops vs Network Size) ===
Nodes,Avg_Hops
10,2.14
20,2.86
30,3.02
ok

test result: ok. 5 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out; finished in 41.20s
";

pub const SCALABILITY_ONLY: &str =
    "=== Benchmark 1: Scalability X ===\nNodes,Avg_Hops\n4,2.1\n8,3.0\n";
