use criterion::{criterion_group, criterion_main, Criterion};
use lisk_codec::crypto::keys::Keypair;
use lisk_codec::transaction::{identifier, sign, transform, TxKind, TxRequest, Transaction};
use lisk_codec::NetworkParams;

fn signed_send(keypair: &Keypair) -> Transaction {
    let req = TxRequest::new(TxKind::Send {
        recipient: "123456789L".into(),
        amount: 1_000_000,
    })
    .sender(keypair.public_key())
    .nonce(0);
    let mut tx = transform(&req, &NetworkParams::mainnet()).unwrap();
    sign(&mut tx, keypair).unwrap();
    tx
}

fn bench_sign(c: &mut Criterion) {
    let keypair = Keypair::from_passphrase("bench passphrase");
    let req = TxRequest::new(TxKind::Send {
        recipient: "123456789L".into(),
        amount: 1_000_000,
    })
    .sender(keypair.public_key())
    .nonce(0);
    let unsigned = transform(&req, &NetworkParams::mainnet()).unwrap();

    c.bench_function("sign_send", |b| {
        b.iter(|| {
            let mut tx = unsigned.clone();
            sign(&mut tx, &keypair).unwrap();
            tx
        })
    });
}

fn bench_identifier(c: &mut Criterion) {
    let keypair = Keypair::from_passphrase("bench passphrase");
    let tx = signed_send(&keypair);

    c.bench_function("identifier", |b| b.iter(|| identifier(&tx).unwrap()));
}

criterion_group!(benches, bench_sign, bench_identifier);
criterion_main!(benches);
