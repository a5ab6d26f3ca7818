use std::sync::mpsc::channel;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use database::{
    consts::consts::EntityId,
    database::{database::Database, options::DatabaseOptions, request_manager::RequestManager},
    model::{action::Action, person::PersonInput},
};
use serde_json::{json, Value};
use threadpool::ThreadPool;

const POOL_SIZE: usize = 4;

const SAMPLE_SIZE: u64 = 10_000;

const INPUT_SIZE: criterion::BatchSize = criterion::BatchSize::LargeInput;

/*
    How this bench is configured:
    1. `iter_batched` is used to avoid the request manager clone from affecting the benchmark
    2. A new database is started for each group, the database is a single thread so the pool
        threads contend on the same queue
    3. After the group the database is shutdown so the thread does not leak into the next group
*/
fn test_input(index: u64) -> PersonInput {
    PersonInput {
        name: Some(Value::from(format!("Person {}", index))),
        age: Some(json!(index)),
        hobbies: Some(json!([])),
    }
}

fn run_actions(rm: &RequestManager, pool: &ThreadPool, generator: fn(u64) -> Action) {
    let (test_tx, test_rx) = channel::<usize>();

    for _ in 0..POOL_SIZE {
        let local_rm = rm.clone();
        let local_tx = test_tx.clone();

        pool.execute(move || {
            let local_actions = SAMPLE_SIZE / POOL_SIZE as u64;

            let successful = (0..local_actions)
                .map(|index| local_rm.send_single_action(generator(index)))
                .filter(Result::is_ok)
                .count();

            local_tx.send(successful).expect("Bench thread should be waiting");
        });
    }

    test_rx.iter().take(POOL_SIZE).sum::<usize>();
}

pub fn rm_add_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rm_add_group");

    let pool = ThreadPool::new(POOL_SIZE);

    let rm = Database::new(DatabaseOptions::new_empty()).run();

    group.throughput(Throughput::Elements(SAMPLE_SIZE));

    group.bench_function("add", |b| {
        b.iter_batched(
            || rm.clone(),
            |rm| run_actions(&rm, &pool, |index| Action::Add(test_input(index))),
            INPUT_SIZE,
        )
    });

    rm.send_shutdown_request().expect("Should shutdown");

    group.finish();
}

pub fn rm_get_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rm_get_group");

    let pool = ThreadPool::new(POOL_SIZE);

    let rm = Database::new(DatabaseOptions::default()).run();

    group.throughput(Throughput::Elements(SAMPLE_SIZE));

    // Every get hits the seed record
    group.bench_function("get", |b| {
        b.iter_batched(
            || rm.clone(),
            |rm| run_actions(&rm, &pool, |_| Action::Get(EntityId::from("1"))),
            INPUT_SIZE,
        )
    });

    rm.send_shutdown_request().expect("Should shutdown");

    group.finish();
}

criterion_group!(benches, rm_add_benchmark, rm_get_benchmark);

criterion_main!(benches);
