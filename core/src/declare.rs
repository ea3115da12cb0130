//! `declare_api!`: generate a typed client from declarative route descriptions.

/// Generate a client struct from a list of route declarations.
///
/// Each declaration reads `VERB "/path/{param}" => fn name(param: Type) -> Ret;`.
/// The generated struct owns a [`TransportHandle`](crate::TransportHandle) and
/// one compiled [`RouteDescription`](crate::route::RouteDescription) per
/// operation, and gets:
///
/// - `fn new(transport) -> Result<Self, ClientError>`, which compiles every
///   route and fails with `MalformedRoute` if a verb is unknown, a template
///   is malformed, or placeholders and parameters disagree;
/// - one `async fn` per declaration, which substitutes the parameters into
///   the template (via `Display`), executes the request, rejects non-2xx
///   statuses and decodes the body into `Ret` (any
///   [`FromResponse`](crate::route::FromResponse) type).
///
/// The struct derives `Debug` and `Clone`; do not derive them again. The
/// transport lives in a field named `__transport`, so no operation may use
/// that name.
///
/// ```no_run
/// use items_core::route::Json;
/// use items_core::{declare_api, ClientConfig, ClientError, TransportHandle};
///
/// declare_api! {
///     /// The catalog endpoints.
///     pub struct CatalogApi {
///         /// Every item id.
///         GET "/items/ids" => fn list_ids() -> Json<Vec<i64>>;
///         /// One item as text.
///         GET "/items/{id}" => fn get_item(id: i64) -> String;
///     }
/// }
///
/// # async fn demo() -> Result<(), ClientError> {
/// let transport = TransportHandle::new(&ClientConfig::new("http://localhost:3000"))?;
/// let api = CatalogApi::new(transport)?;
/// let body = api.get_item(1).await?;
/// println!("{body}");
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! declare_api {
    (
        $(#[$meta:meta])*
        $vis:vis struct $api:ident {
            $(
                $(#[$op_meta:meta])*
                $verb:ident $path:literal => fn $op:ident($($param:ident : $ty:ty),* $(,)?) -> $ret:ty;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $api {
            __transport: $crate::TransportHandle,
            $($op: $crate::route::RouteDescription,)+
        }

        impl $api {
            /// Compile every declared route and bind the client to `transport`.
            #[allow(dead_code)]
            $vis fn new(
                transport: $crate::TransportHandle,
            ) -> ::std::result::Result<Self, $crate::ClientError> {
                ::std::result::Result::Ok(Self {
                    $(
                        $op: $crate::route::RouteDescription::new(
                            ::std::stringify!($op),
                            ::std::stringify!($verb),
                            $path,
                            &[$(::std::stringify!($param)),*],
                        )?,
                    )+
                    __transport: transport,
                })
            }

            $(
                $(#[$op_meta])*
                #[allow(dead_code)]
                $vis async fn $op(
                    &self,
                    $($param: $ty),*
                ) -> ::std::result::Result<$ret, $crate::ClientError> {
                    let request = self.$op.build(&[
                        $((::std::stringify!($param), &$param as &dyn ::std::fmt::Display)),*
                    ])?;
                    let response = self.__transport.execute(request).await?;
                    $crate::route::decode_response::<$ret>(response)
                }
            )+
        }
    };
}
