use rpp_algparams::{
    make_parameters, names, ByteArrayParameter, Catalog, CatalogExt, ConstByteArrayParameter,
    ParamError, ParamResult, TypeTag,
};

/// XORs the input buffer with a single-byte key into the output buffer.
fn xor_into(params: &dyn Catalog) -> ParamResult<usize> {
    let input: ConstByteArrayParameter<'_> = params.get_required("Xor", names::INPUT_BUFFER)?;
    let output: ByteArrayParameter<'_> = params.get_required("Xor", names::OUTPUT_BUFFER)?;
    let key = params.get_or(names::KEY, 0u32)? as u8;
    let masked: Vec<u8> = input.as_slice().iter().map(|byte| byte ^ key).collect();
    Ok(output.copy_from_slice(&masked))
}

#[test]
fn receiver_writes_through_mutable_view() {
    let input = *b"abcd";
    let mut output = [0u8; 4];
    let written = make_parameters(names::INPUT_BUFFER, &input[..])
        .with(names::OUTPUT_BUFFER, ByteArrayParameter::new(&mut output))
        .with(names::KEY, 0x20u32)
        .scoped(xor_into)
        .unwrap();
    assert_eq!(written, 4);
    assert_eq!(&output, b"ABCD");
}

#[test]
fn deep_copy_outlives_source_buffer() {
    let params = {
        let scratch = vec![1u8, 2, 3];
        make_parameters(
            names::SEED,
            ConstByteArrayParameter::new(&scratch, true).into_owned(),
        )
    };
    let seed: ConstByteArrayParameter<'_> = params.get(names::SEED).unwrap().unwrap();
    assert!(seed.is_deep_copy());
    assert_eq!(seed.as_slice(), &[1, 2, 3]);
    params.finish(false).unwrap();
}

#[test]
fn const_and_mutable_views_are_distinct_types() {
    let mut output = [0u8; 2];
    let params = make_parameters(names::OUTPUT_BUFFER, ByteArrayParameter::new(&mut output));
    let err = params
        .get::<ConstByteArrayParameter<'_>>(names::OUTPUT_BUFFER)
        .unwrap_err();
    assert_eq!(
        err,
        ParamError::TypeMismatch {
            name: names::OUTPUT_BUFFER.into(),
            stored: TypeTag::Bytes,
            requested: TypeTag::ConstBytes,
        }
    );
    assert!(params.finish(true).is_ok());
}
