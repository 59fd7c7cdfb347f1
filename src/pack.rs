/// Resource-pack information attached to a builder.
///
/// The builder never reads this record; it is stored and handed back as is.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PackInfo {
    model_name: Option<String>,
    textures: Vec<String>,
    generate_model: bool,
    parent_model: String,
    custom_model_data: Option<i32>,
}

impl Default for PackInfo {
    fn default() -> Self {
        Self {
            model_name: None,
            textures: Vec::new(),
            generate_model: false,
            parent_model: "item/generated".to_owned(),
            custom_model_data: None,
        }
    }
}

impl PackInfo {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A pack entry backed by an existing model file.
    pub fn with_model(model_name: impl Into<String>) -> Self {
        Self {
            model_name: Some(model_name.into()),
            ..Self::default()
        }
    }

    /// A pack entry whose model is generated from `textures`.
    pub fn generated<I, S>(textures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            textures: textures.into_iter().map(Into::into).collect(),
            generate_model: true,
            ..Self::default()
        }
    }

    pub fn with_parent_model(mut self, parent_model: impl Into<String>) -> Self {
        self.parent_model = parent_model.into();
        self
    }

    pub fn with_custom_model_data(mut self, custom_model_data: i32) -> Self {
        self.custom_model_data = Some(custom_model_data);
        self
    }

    #[inline]
    pub fn model_name(&self) -> Option<&str> {
        self.model_name.as_deref()
    }

    #[inline]
    pub fn textures(&self) -> &[String] {
        &self.textures
    }

    #[inline]
    pub fn generates_model(&self) -> bool {
        self.generate_model
    }

    #[inline]
    pub fn parent_model(&self) -> &str {
        &self.parent_model
    }

    #[inline]
    pub fn custom_model_data(&self) -> Option<i32> {
        self.custom_model_data
    }
}
