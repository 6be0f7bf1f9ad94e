//! core-js polyfills already shipped by the legacy polyfill bundle.
//!
//! `@babel/preset-env` would otherwise inject these per module under
//! `useBuiltIns: "usage"`, duplicating what the legacy bundle loads up front.

pub const POLYFILL_EXCLUDE_LIST: &[&str] = &[
    "es.array.fill",
    "es.array.find",
    "es.array.find-index",
    "es.array.flat",
    "es.array.flat-map",
    "es.array.from",
    "es.array.includes",
    "es.array.iterator",
    "es.array.of",
    "es.array.sort",
    "es.function.name",
    "es.map",
    "es.number.is-nan",
    "es.object.assign",
    "es.object.entries",
    "es.object.from-entries",
    "es.object.values",
    "es.promise",
    "es.promise.finally",
    "es.set",
    "es.string.ends-with",
    "es.string.includes",
    "es.string.iterator",
    "es.string.starts-with",
    "es.string.trim",
    "es.symbol",
    "es.symbol.description",
    "es.symbol.iterator",
    "es.weak-map",
    "es.weak-set",
    "web.dom-collections.for-each",
    "web.dom-collections.iterator",
    "web.url",
    "web.url-search-params",
];
