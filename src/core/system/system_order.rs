//! Central system ordering labels to make the update sequence explicit.
//! Stages (high-level):
//! 1. LoaderCollect (asset server polling, host signals)
//! 2. LoaderApply (settled assets folded into the session)
//! 3. LoaderAdvance (timeline, floor timer, readiness gate)
//! 4. Presentation (loader UI, fades, page reveal)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct LoaderCollectSet; // produces AssetSettled events and the document signal

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct LoaderApplySet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct LoaderAdvanceSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PresentationSet; // everything that writes colours, widths or text
