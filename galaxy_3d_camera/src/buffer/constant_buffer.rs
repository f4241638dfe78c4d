/// ConstantBuffer: CPU-side storage for a named-field parameter block.
///
/// The layout is an ordered list of typed fields packed with std140 rules,
/// repeated `count` times. Field names resolve to offsets inside element 0,
/// which is what `ParameterBlock::variable_offset` reports.

use std::collections::{HashMap, HashSet};
use crate::error::{Error, Result};
use crate::engine_bail;
use super::ParameterBlock;

const SOURCE: &str = "galaxy3d::ConstantBuffer";

/// Scalar, vector and matrix types a field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Float,
    Vec2,
    Vec3,
    Vec4,
    Mat3,
    Mat4,
    Int,
    UInt,
}

impl FieldType {
    /// Bytes occupied by the field itself (std140).
    pub fn size_bytes(&self) -> u64 {
        match self {
            FieldType::Float | FieldType::Int | FieldType::UInt => 4,
            FieldType::Vec2 => 8,
            // a following scalar may use the 4 trailing bytes
            FieldType::Vec3 => 12,
            FieldType::Vec4 => 16,
            FieldType::Mat3 => 48,
            FieldType::Mat4 => 64,
        }
    }

    /// Required start alignment (std140).
    pub fn alignment(&self) -> u64 {
        match self {
            FieldType::Float | FieldType::Int | FieldType::UInt => 4,
            FieldType::Vec2 => 8,
            FieldType::Vec3 | FieldType::Vec4 | FieldType::Mat3 | FieldType::Mat4 => 16,
        }
    }
}

/// Named, typed member of a constant buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDesc {
    pub name: String,
    pub field_type: FieldType,
}

impl FieldDesc {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self { name: name.into(), field_type }
    }
}

/// Layout and element count of a constant buffer.
#[derive(Debug, Clone)]
pub struct ConstantBufferDesc {
    pub fields: Vec<FieldDesc>,
    /// Number of array elements, at least 1
    pub count: u32,
}

impl Default for ConstantBufferDesc {
    fn default() -> Self {
        Self { fields: Vec::new(), count: 1 }
    }
}

fn align_up(value: u64, alignment: u64) -> u64 {
    value.div_ceil(alignment) * alignment
}

/// Field offsets inside one element, and the element stride.
fn std140_layout(fields: &[FieldDesc]) -> (Vec<u64>, u64) {
    let mut end = 0;
    let offsets = fields
        .iter()
        .map(|field| {
            let offset = align_up(end, field.field_type.alignment());
            end = offset + field.field_type.size_bytes();
            offset
        })
        .collect();

    // structures are padded to a vec4 boundary
    (offsets, align_up(end, 16))
}

fn validate(desc: &ConstantBufferDesc) -> Result<()> {
    if desc.fields.is_empty() {
        engine_bail!(SOURCE, "Buffer must have at least one field");
    }
    if desc.count == 0 {
        engine_bail!(SOURCE, "Buffer must have at least one element");
    }

    let mut names = HashSet::with_capacity(desc.fields.len());
    if let Some(duplicate) = desc.fields.iter().find(|f| !names.insert(f.name.as_str())) {
        engine_bail!(SOURCE, "Duplicate field name '{}'", duplicate.name);
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct ConstantBuffer {
    fields: Vec<FieldDesc>,
    offsets: Vec<u64>,
    by_name: HashMap<String, usize>,
    stride: u64,
    count: u32,
    bytes: Vec<u8>,
}

impl ConstantBuffer {
    /// Validate `desc` and allocate zeroed storage for `count` elements.
    ///
    /// # Errors
    ///
    /// `Error::InvalidResource` for an empty field list, a zero count or a
    /// repeated field name.
    pub fn from_desc(desc: ConstantBufferDesc) -> Result<Self> {
        validate(&desc)?;

        let (offsets, stride) = std140_layout(&desc.fields);
        let by_name = desc
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name.clone(), index))
            .collect();

        crate::engine_debug!(SOURCE,
            "Created buffer: {} fields, stride {}, count {}", desc.fields.len(), stride, desc.count);

        Ok(Self {
            fields: desc.fields,
            offsets,
            by_name,
            stride,
            count: desc.count,
            bytes: vec![0; (stride * desc.count as u64) as usize],
        })
    }

    // ===== ACCESSORS =====

    /// Bytes per element, padded to 16.
    pub fn stride(&self) -> u64 { self.stride }

    pub fn count(&self) -> u32 { self.count }

    pub fn fields(&self) -> &[FieldDesc] { &self.fields }

    /// Raw contents, `stride * count` bytes.
    pub fn data(&self) -> &[u8] { &self.bytes }

    pub fn field_id(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Offset of a field inside one element.
    pub fn field_offset(&self, field_index: usize) -> Option<u64> {
        self.offsets.get(field_index).copied()
    }

    // ===== WRITES =====

    fn element_start(&self, index: u32) -> Result<u64> {
        if index >= self.count {
            return Err(Error::OutOfBounds(format!(
                "Element index {} out of bounds (count: {})", index, self.count)));
        }
        Ok(self.stride * index as u64)
    }

    /// Overwrite the start of element `index` with `data` (at most one stride).
    pub fn update_element(&mut self, index: u32, data: &[u8]) -> Result<()> {
        let start = self.element_start(index)?;
        if data.len() as u64 > self.stride {
            return Err(Error::OutOfBounds(format!(
                "Data size {} exceeds stride {}", data.len(), self.stride)));
        }
        self.update_raw(start, data)
    }

    /// Overwrite one field of element `index`. `data` must match the field size.
    pub fn update_field(&mut self, index: u32, field_index: usize, data: &[u8]) -> Result<()> {
        let start = self.element_start(index)?;
        let (offset, field) = self
            .field_offset(field_index)
            .zip(self.fields.get(field_index))
            .ok_or_else(|| Error::OutOfBounds(format!("Field index {} out of bounds", field_index)))?;

        let expected = field.field_type.size_bytes();
        if data.len() as u64 != expected {
            engine_bail!(SOURCE,
                "Field '{}' expects {} bytes, got {}", field.name, expected, data.len());
        }
        self.update_raw(start + offset, data)
    }

    /// Overwrite bytes at an absolute offset.
    pub fn update_raw(&mut self, offset: u64, data: &[u8]) -> Result<()> {
        let len = self.bytes.len();
        let target = usize::try_from(offset)
            .ok()
            .and_then(|start| Some(start..start.checked_add(data.len())?))
            .and_then(|range| self.bytes.get_mut(range))
            .ok_or_else(|| Error::OutOfBounds(format!(
                "Write of {} bytes at offset {} exceeds buffer size {}",
                data.len(), offset, len)))?;
        target.copy_from_slice(data);
        Ok(())
    }
}

impl ParameterBlock for ConstantBuffer {
    /// Offset of the named field in element 0.
    fn variable_offset(&self, name: &str) -> Option<u64> {
        self.field_id(name).and_then(|index| self.field_offset(index))
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn set_blob(&mut self, offset: u64, data: &[u8]) -> Result<()> {
        self.update_raw(offset, data)
    }
}

#[cfg(test)]
#[path = "constant_buffer_tests.rs"]
mod tests;
