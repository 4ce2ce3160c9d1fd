use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::PathBuf;

use bufpool::buffer::BufferManager;
use bufpool::common::BlockId;
use bufpool::storage::{disk, Page};
use tempfile::{tempdir, TempDir};

const POOL_SIZE: usize = 64;
const FILE_BLOCKS: u32 = 256;

// Helper to create a data file with FILE_BLOCKS blocks in a temp dir
fn setup_file() -> (PathBuf, TempDir) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bench.db");
    disk::create_empty_file(&path).unwrap();
    let page = Page::new();
    disk::write_block(&path, BlockId::new(FILE_BLOCKS - 1), &page).unwrap();
    (path, dir)
}

/// Hit path: the block is resident, so a fetch is pure bookkeeping.
fn bench_fetch_hit(c: &mut Criterion) {
    let (path, _dir) = setup_file();
    let mut pool = BufferManager::new(POOL_SIZE);

    c.bench_function("fetch_hit", |b| {
        b.iter(|| {
            let h = pool
                .fetch_page(&path, black_box(BlockId::new(0)))
                .unwrap();
            pool.unpin_page(h).unwrap();
        })
    });
}

/// Miss path: cycling through more blocks than frames forces an eviction
/// (and a disk read) on every fetch.
fn bench_fetch_evict(c: &mut Criterion) {
    let (path, _dir) = setup_file();
    let mut pool = BufferManager::new(POOL_SIZE);
    let mut next = 0u32;

    c.bench_function("fetch_evict", |b| {
        b.iter(|| {
            let block = BlockId::new(next % FILE_BLOCKS);
            next = next.wrapping_add(1);
            let h = pool.fetch_page(&path, black_box(block)).unwrap();
            pool.unpin_page(h).unwrap();
        })
    });
}

/// Dirty churn: every page is modified, so each eviction pays a write-back.
fn bench_dirty_churn(c: &mut Criterion) {
    let (path, _dir) = setup_file();
    let mut pool = BufferManager::new(POOL_SIZE);
    let mut next = 0u32;

    c.bench_function("dirty_churn", |b| {
        b.iter(|| {
            let block = BlockId::new(next % FILE_BLOCKS);
            next = next.wrapping_add(1);
            let h = pool.fetch_page(&path, black_box(block)).unwrap();
            pool.page_data_mut(h).unwrap()[0] = next as u8;
            pool.unpin_page(h).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_fetch_hit,
    bench_fetch_evict,
    bench_dirty_churn
);
criterion_main!(benches);
