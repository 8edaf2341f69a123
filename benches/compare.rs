use handlebox::Handle;
use handlebox::space::{S1, S64};

fn main() {
    divan::main();
}

#[divan::bench]
fn handle_small_body_small_space() {
    divan::black_box({
        let small: Handle<u64, S1> = Handle::new();
        small
    });
}

#[divan::bench]
fn handle_small_body_large_space() {
    divan::black_box({
        let small: Handle<u64, S64> = Handle::new();
        small
    });
}

#[divan::bench]
fn handle_large_body_small_space() {
    divan::black_box({
        let large: Handle<[u64; 32], S1> = Handle::new();
        large
    });
}

#[divan::bench]
fn handle_large_body_large_space() {
    divan::black_box({
        let large: Handle<[u64; 32], S64> = Handle::new();
        large
    });
}

#[divan::bench]
fn handle_clone_inline() {
    let small: Handle<u64, S64> = Handle::new();
    divan::black_box(divan::black_box(&small).clone());
}

#[divan::bench]
fn handle_clone_boxed() {
    let large: Handle<[u64; 32], S1> = Handle::new();
    divan::black_box(divan::black_box(&large).clone());
}

#[divan::bench]
fn box_small_body() {
    divan::black_box(Box::<u64>::default());
}

#[divan::bench]
fn box_large_body() {
    divan::black_box(Box::<[u64; 32]>::default());
}
