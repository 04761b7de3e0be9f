//! Provides the benchmark of range search for the BkTree, VpTree, and
//! LinearSearch algorithms.
use mtree_rs::{BkTree, CodeInt, LinearSearch, VpTree};
use rand::distributions::{Distribution, Standard};
use rand::{thread_rng, Rng};
use std::any::type_name;
use std::time;

const SIZES: [usize; 3] = [10_000, 100_000, 1_000_000];
const RADII: [usize; 4] = [1, 2, 4, 6];
const NUM_QUERIES: usize = 100;
const LEAF_CAPACITY: usize = 1000;

fn main() {
    #[cfg(debug_assertions)]
    println!("Debugging enabled");

    {
        let codes = gen_random_codes::<u32>(SIZES[SIZES.len() - 1]);
        let qcodes = gen_random_codes::<u32>(NUM_QUERIES);
        perf_test(codes, qcodes);
    }
    println!();
    {
        let codes = gen_random_codes::<u64>(SIZES[SIZES.len() - 1]);
        let qcodes = gen_random_codes::<u64>(NUM_QUERIES);
        perf_test(codes, qcodes);
    }
}

fn perf_test<T: CodeInt>(codes: Vec<T>, qcodes: Vec<T>) {
    println!("*** perf_test<{}> ***", type_name::<T>());

    for &size in &SIZES {
        println!("-- N={} --", size);

        let ins = time::Instant::now();
        let linear = LinearSearch::new(&codes[0..size]).unwrap();
        let elapsed_sec = ins.elapsed().as_secs_f64();
        println!("LinearSearch constr time: {} sec", elapsed_sec);

        let ins = time::Instant::now();
        let bk = BkTree::with_leaf_capacity(&codes[0..size], LEAF_CAPACITY).unwrap();
        let elapsed_sec = ins.elapsed().as_secs_f64();
        println!(
            "BkTree constr time: {} sec ({} nodes)",
            elapsed_sec,
            bk.get_stats().nodes
        );

        let ins = time::Instant::now();
        let vp = VpTree::with_leaf_capacity(&codes[0..size], LEAF_CAPACITY).unwrap();
        let elapsed_sec = ins.elapsed().as_secs_f64();
        println!(
            "VpTree constr time: {} sec ({} nodes)",
            elapsed_sec,
            vp.get_stats().nodes
        );

        for &radius in &RADII {
            assert!(radius <= T::dimensions());
            println!("- Radius={} -", radius);
            report("LinearSearch", size, &qcodes, |q, buf| {
                linear.range_search_with_buf(q, radius, buf)
            });
            report("BkTree", size, &qcodes, |q, buf| {
                bk.range_search_with_buf(q, radius, buf)
            });
            report("VpTree", size, &qcodes, |q, buf| {
                vp.range_search_with_buf(q, radius, buf)
            });
        }
    }
}

fn report<T, F>(name: &str, size: usize, qcodes: &[T], mut search: F)
where
    T: CodeInt,
    F: FnMut(T, &mut Vec<T>) -> usize,
{
    let mut answers = Vec::new();
    let mut hits = 0usize;
    let mut visited = 0usize;

    let ins = time::Instant::now();
    for &qcode in qcodes {
        visited += search(qcode, &mut answers);
        hits += answers.len();
    }
    let elapsed_ms = ins.elapsed().as_millis() as f64;

    println!(
        "{}:\t{:.3} ms/query, {:.2} mean hits, {:.2}% coverage",
        name,
        elapsed_ms / qcodes.len() as f64,
        hits as f64 / qcodes.len() as f64,
        100.0 * visited as f64 / (size * qcodes.len()) as f64
    );
}

fn gen_random_codes<T>(size: usize) -> Vec<T>
where
    Standard: Distribution<T>,
{
    let mut rng = thread_rng();
    let mut codes: Vec<T> = Vec::with_capacity(size);
    for _ in 0..size {
        codes.push(rng.gen::<T>());
    }
    codes
}
