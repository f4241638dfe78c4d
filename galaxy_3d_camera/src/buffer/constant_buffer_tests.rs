use super::*;
use crate::buffer::ParameterBlock;
use crate::error::Error;

// ============================================================================
// Helpers
// ============================================================================

fn make_fields(fields: &[(&str, FieldType)]) -> Vec<FieldDesc> {
    fields.iter().map(|(name, ft)| FieldDesc::new(*name, *ft)).collect()
}

fn create_test_buffer(fields: &[(&str, FieldType)], count: u32) -> ConstantBuffer {
    ConstantBuffer::from_desc(ConstantBufferDesc {
        fields: make_fields(fields),
        count,
    }).unwrap()
}

// ============================================================================
// FieldType tests
// ============================================================================

#[test]
fn test_field_type_size_bytes() {
    assert_eq!(FieldType::Float.size_bytes(), 4);
    assert_eq!(FieldType::Vec2.size_bytes(), 8);
    assert_eq!(FieldType::Vec3.size_bytes(), 12);
    assert_eq!(FieldType::Vec4.size_bytes(), 16);
    assert_eq!(FieldType::Mat3.size_bytes(), 48);
    assert_eq!(FieldType::Mat4.size_bytes(), 64);
    assert_eq!(FieldType::Int.size_bytes(), 4);
    assert_eq!(FieldType::UInt.size_bytes(), 4);
}

#[test]
fn test_field_type_alignment() {
    assert_eq!(FieldType::Float.alignment(), 4);
    assert_eq!(FieldType::Vec2.alignment(), 8);
    assert_eq!(FieldType::Vec3.alignment(), 16);
    assert_eq!(FieldType::Vec4.alignment(), 16);
    assert_eq!(FieldType::Mat3.alignment(), 16);
    assert_eq!(FieldType::Mat4.alignment(), 16);
}

// ============================================================================
// Validation tests
// ============================================================================

#[test]
fn test_empty_fields_rejected() {
    let result = ConstantBuffer::from_desc(ConstantBufferDesc::default());
    assert!(matches!(result, Err(Error::InvalidResource(_))));
}

#[test]
fn test_zero_count_rejected() {
    let result = ConstantBuffer::from_desc(ConstantBufferDesc {
        fields: make_fields(&[("a", FieldType::Float)]),
        count: 0,
    });
    assert!(matches!(result, Err(Error::InvalidResource(_))));
}

#[test]
fn test_duplicate_field_rejected() {
    let result = ConstantBuffer::from_desc(ConstantBufferDesc {
        fields: make_fields(&[("a", FieldType::Float), ("a", FieldType::Vec4)]),
        count: 1,
    });
    match result {
        Err(Error::InvalidResource(msg)) => assert!(msg.contains("Duplicate field name 'a'")),
        other => panic!("expected InvalidResource, got {:?}", other),
    }
}

// ============================================================================
// Layout tests
// ============================================================================

#[test]
fn test_vec3_followed_by_float_packs() {
    let buffer = create_test_buffer(&[
        ("position", FieldType::Vec3),
        ("radius", FieldType::Float),
    ], 1);

    assert_eq!(buffer.field_offset(0), Some(0));
    assert_eq!(buffer.field_offset(1), Some(12));
    assert_eq!(buffer.stride(), 16);
}

#[test]
fn test_float_then_vec4_is_aligned() {
    let buffer = create_test_buffer(&[
        ("intensity", FieldType::Float),
        ("color", FieldType::Vec4),
    ], 1);

    assert_eq!(buffer.field_offset(1), Some(16));
    assert_eq!(buffer.stride(), 32);
}

#[test]
fn test_stride_rounds_up_to_16() {
    let buffer = create_test_buffer(&[("a", FieldType::Float)], 3);
    assert_eq!(buffer.stride(), 16);
    assert_eq!(buffer.size(), 48);
    assert_eq!(buffer.data().len(), 48);
}

#[test]
fn test_field_lookup_by_name() {
    let buffer = create_test_buffer(&[
        ("world", FieldType::Mat4),
        ("tint", FieldType::Vec4),
    ], 1);

    assert_eq!(buffer.field_id("tint"), Some(1));
    assert_eq!(buffer.field_id("missing"), None);
    assert_eq!(buffer.variable_offset("tint"), Some(64));
    assert_eq!(buffer.variable_offset("missing"), None);
}

// ============================================================================
// Update tests
// ============================================================================

#[test]
fn test_update_field_writes_at_offset() {
    let mut buffer = create_test_buffer(&[
        ("a", FieldType::Float),
        ("b", FieldType::Float),
    ], 2);

    buffer.update_field(1, 1, &7.0f32.to_ne_bytes()).unwrap();

    let offset = (buffer.stride() + 4) as usize;
    assert_eq!(&buffer.data()[offset..offset + 4], &7.0f32.to_ne_bytes());
    assert!(buffer.data()[..offset].iter().all(|&b| b == 0));
}

#[test]
fn test_update_field_size_mismatch() {
    let mut buffer = create_test_buffer(&[("a", FieldType::Vec4)], 1);
    let result = buffer.update_field(0, 0, &[0u8; 4]);
    assert!(matches!(result, Err(Error::InvalidResource(_))));
}

#[test]
fn test_update_field_bad_indices() {
    let mut buffer = create_test_buffer(&[("a", FieldType::Float)], 1);
    assert!(matches!(buffer.update_field(1, 0, &[0u8; 4]), Err(Error::OutOfBounds(_))));
    assert!(matches!(buffer.update_field(0, 3, &[0u8; 4]), Err(Error::OutOfBounds(_))));
}

#[test]
fn test_update_element() {
    let mut buffer = create_test_buffer(&[("a", FieldType::Vec4)], 2);
    buffer.update_element(1, &[1u8; 16]).unwrap();

    assert!(buffer.data()[..16].iter().all(|&b| b == 0));
    assert!(buffer.data()[16..].iter().all(|&b| b == 1));
    assert!(matches!(buffer.update_element(2, &[1u8; 16]), Err(Error::OutOfBounds(_))));
    assert!(matches!(buffer.update_element(0, &[1u8; 17]), Err(Error::OutOfBounds(_))));
}

#[test]
fn test_set_blob_out_of_bounds() {
    let mut buffer = create_test_buffer(&[("a", FieldType::Vec4)], 1);
    assert!(buffer.set_blob(8, &[0u8; 8]).is_ok());
    assert!(matches!(buffer.set_blob(8, &[0u8; 9]), Err(Error::OutOfBounds(_))));
}

#[test]
fn test_update_raw_in_bounds_writes_bytes() {
    let mut buffer = create_test_buffer(&[("a", FieldType::Vec4)], 1);
    buffer.update_raw(12, &[9u8; 4]).unwrap();

    assert!(buffer.data()[..12].iter().all(|&b| b == 0));
    assert_eq!(&buffer.data()[12..], &[9u8; 4]);
}

#[test]
fn test_update_raw_huge_offset_is_out_of_bounds() {
    let mut buffer = create_test_buffer(&[("a", FieldType::Vec4)], 1);

    // Offsets past usize range or whose end overflows must not wrap to a low address
    for offset in [u64::MAX, u64::MAX - 2, 1u64 << 32] {
        match buffer.update_raw(offset, &[1u8; 4]) {
            Err(Error::OutOfBounds(msg)) => assert!(msg.contains("exceeds buffer size 16")),
            other => panic!("expected OutOfBounds for offset {}, got {:?}", offset, other),
        }
    }
    assert!(buffer.data().iter().all(|&b| b == 0));
}
