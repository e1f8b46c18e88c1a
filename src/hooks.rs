/* This file is part of the VeilPlayer project - https://github.com/veilplayer/veilplayer
*
*  Copyright (C) 2026 the VeilPlayer authors
*
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use yew::platform::spawn_local;
use yew::prelude::*;
use yew::suspense::{Suspension, SuspensionResult};

enum FetchState<R>
where
    R: 'static,
{
    Pending,
    Running(Suspension),
    Done(Rc<R>),
}

/// Runs a future once per change of `deps`, suspending the component until
/// the result is in. Re-renders with the same deps reuse the cached result.
#[hook]
pub fn use_async_suspension<FF, F, D, R>(future: FF, deps: D) -> SuspensionResult<Rc<R>>
where
    FF: 'static + FnOnce(D) -> F,
    F: 'static + Future<Output = R>,
    D: 'static + PartialEq + Clone,
    R: 'static,
{
    let state_ref: Rc<RefCell<FetchState<R>>> = use_memo(deps.clone(), |_| RefCell::new(FetchState::Pending));
    let mut state = state_ref.borrow_mut();
    match *state {
        FetchState::Running(ref suspension) => Err(suspension.clone()),
        FetchState::Done(ref result) => Ok(result.clone()),
        FetchState::Pending => {
            let (suspension, handle) = Suspension::new();
            *state = FetchState::Running(suspension.clone());
            drop(state);
            spawn_local(async move {
                let result = future(deps).await;
                *state_ref.borrow_mut() = FetchState::Done(Rc::new(result));
                handle.resume();
            });
            Err(suspension)
        }
    }
}
