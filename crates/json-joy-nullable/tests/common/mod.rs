#![allow(dead_code)]

use json_joy_nullable::{DecodeRecord, FieldSet, NullableFloat, NullableFloatSlice};

/// `{"value": <number>}`
#[derive(Debug, Default, PartialEq)]
pub struct FloatRecord {
    pub value: NullableFloat,
}

impl DecodeRecord for FloatRecord {
    fn register<'a>(&'a mut self, fields: &mut FieldSet<'a>) {
        fields.insert("value", &mut self.value);
    }
}

/// `{"value": [<number>, ...]}`
#[derive(Debug, Default, PartialEq)]
pub struct FloatSliceRecord {
    pub value: NullableFloatSlice,
}

impl DecodeRecord for FloatSliceRecord {
    fn register<'a>(&'a mut self, fields: &mut FieldSet<'a>) {
        fields.insert("value", &mut self.value);
    }
}

/// Several nullable fields side by side.
#[derive(Debug, Default, PartialEq)]
pub struct Reading {
    pub min: NullableFloat,
    pub max: NullableFloat,
    pub samples: NullableFloatSlice,
}

impl DecodeRecord for Reading {
    fn register<'a>(&'a mut self, fields: &mut FieldSet<'a>) {
        fields.insert("min", &mut self.min);
        fields.insert("max", &mut self.max);
        fields.insert("samples", &mut self.samples);
    }
}
