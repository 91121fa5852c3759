mod parsed;

pub(crate) use parsed::ParsedToken;
