//! Code generation for the per-model builder and response plumbing.

/// Generates the fluent builder for one model.
///
/// Every model declares its fields in one of three sections:
/// `required` fields take their value when the builder is created,
/// `optional` fields get a fluent setter wrapping the value in `Some`,
/// and `clearable` fields get a value setter plus a named clear setter
/// that records an explicit null for the wire.
///
/// The builder wraps a copy of the model itself, so `to_builder()` on a
/// deserialized model preserves every field it carried, including ones
/// outside the declared sections.
macro_rules! model_builder {
    (
        model = $model:ident,
        builder = $builder:ident,
        required = { $( $req:ident : $req_ty:ty ),* $(,)? },
        optional = { $( $opt:ident : $opt_ty:ty ),* $(,)? },
        clearable = { $( $clr:ident : $clr_ty:ty => $clear:ident ),* $(,)? } $(,)?
    ) => {
        #[doc = concat!("Fluent builder for [`", stringify!($model), "`].")]
        #[derive(Debug, Clone)]
        pub struct $builder {
            inner: $model,
        }

        impl $model {
            #[doc = concat!(
                "Starts building a [`",
                stringify!($model),
                "`] from its required fields."
            )]
            #[must_use]
            pub fn builder( $( $req: impl Into<$req_ty> ),* ) -> $builder {
                #[allow(unused_mut)]
                let mut inner = Self::default();
                $( inner.$req = $req.into(); )*
                $builder { inner }
            }

            /// Builder pre-populated with this model's current field values.
            #[must_use]
            pub fn to_builder(&self) -> $builder {
                $builder {
                    inner: self.clone(),
                }
            }
        }

        impl $builder {
            $(
                #[doc = concat!("Sets `", stringify!($req), "`.")]
                #[must_use]
                pub fn $req(mut self, $req: impl Into<$req_ty>) -> Self {
                    self.inner.$req = $req.into();
                    self
                }
            )*

            $(
                #[doc = concat!("Sets `", stringify!($opt), "`.")]
                #[must_use]
                pub fn $opt(mut self, $opt: impl Into<$opt_ty>) -> Self {
                    self.inner.$opt = Some($opt.into());
                    self
                }
            )*

            $(
                #[doc = concat!("Sets `", stringify!($clr), "`.")]
                #[must_use]
                pub fn $clr(mut self, $clr: impl Into<$clr_ty>) -> Self {
                    self.inner.$clr = $crate::models::Patch::Value($clr.into());
                    self
                }

                #[doc = concat!(
                    "Marks `",
                    stringify!($clr),
                    "` to be cleared with an explicit null."
                )]
                #[must_use]
                pub fn $clear(mut self) -> Self {
                    self.inner.$clr = $crate::models::Patch::Null;
                    self
                }
            )*

            /// Finishes building, yielding the model. Never fails.
            #[must_use]
            pub fn build(self) -> $model {
                self.inner
            }
        }
    };
}

/// Implements [`crate::http::ApiResponseBody`] for response models holding
/// an `http_context` field.
macro_rules! api_response {
    ( $( $model:ident ),+ $(,)? ) => {
        $(
            impl $crate::http::ApiResponseBody for $model {
                fn attach_context(&mut self, context: $crate::http::HttpContext) {
                    self.http_context = Some(context);
                }

                fn http_context(&self) -> Option<&$crate::http::HttpContext> {
                    self.http_context.as_ref()
                }
            }
        )+
    };
}

pub(crate) use api_response;
pub(crate) use model_builder;
