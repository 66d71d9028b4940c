use criterion::{black_box, criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use rpp_algparams::{
    make_parameters_with, names, AccessorTable, AssignTable, Catalog, CatalogExt, ParamResult,
    Slot,
};

#[derive(Debug, Clone, Default)]
struct BlockCipher {
    key_size: u32,
    rounds: i32,
}

static ACCESSORS: Lazy<AccessorTable<BlockCipher>> = Lazy::new(|| {
    AccessorTable::new()
        .assignable()
        .named(names::KEY_SIZE, |cipher: &BlockCipher| cipher.key_size)
        .named(names::ROUNDS, |cipher: &BlockCipher| cipher.rounds)
});

static ASSIGN: Lazy<AssignTable<BlockCipher>> = Lazy::new(|| {
    AssignTable::new()
        .named(names::KEY_SIZE, |cipher: &mut BlockCipher, size: u32| {
            cipher.key_size = size
        })
        .named(names::ROUNDS, |cipher: &mut BlockCipher, rounds: i32| {
            cipher.rounds = rounds
        })
});

impl Catalog for BlockCipher {
    fn resolve<'s>(&'s self, name: &str, slot: &mut Slot<'s>) -> ParamResult<bool> {
        ACCESSORS.resolve(self, name, slot, None)
    }
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("parameter_chain");
    group.bench_function("build_and_resolve_depth4", |b| {
        b.iter(|| {
            let params = make_parameters_with(names::KEY_SIZE, 32u32, false)
                .with(names::ROUNDS, 14)
                .with(names::IV, "0123456789abcdef")
                .with(names::FEEDBACK_SIZE, 16u32);
            black_box(params.get::<u32>(black_box(names::KEY_SIZE)).expect("resolve"));
        });
    });

    let params = make_parameters_with(names::KEY_SIZE, 32u32, false).with(names::ROUNDS, 14);
    group.bench_function("assign_from_chain", |b| {
        b.iter(|| {
            let mut cipher = BlockCipher::default();
            ASSIGN.assign_from(&mut cipher, &params).expect("assign");
            black_box(cipher);
        });
    });

    let source = BlockCipher {
        key_size: 16,
        rounds: 10,
    };
    group.bench_function("assign_whole_object", |b| {
        b.iter(|| {
            let mut cipher = BlockCipher::default();
            ASSIGN.assign_from(&mut cipher, &source).expect("assign");
            black_box(cipher);
        });
    });
    group.bench_function("value_names", |b| {
        b.iter(|| black_box(source.value_names()));
    });
    group.finish();
}

criterion_group!(benches, bench_chain);
criterion_main!(benches);
