use crate::error::Result;
use crate::graph::EliminationGraph;
use crate::ordering::PermutationStrategy;
use crate::sparse::SparseView;

///Cached elimination cost of a node.
#[derive(Clone,Copy,Debug,PartialEq)]
enum Cost{
    Stale,
    Fresh(usize)
}

///Repeatedly eliminates the node whose elimination adds the fewest
///new edges right now. Ties go to the lowest node index.
///
///Costs are cached per node. Eliminating `n` can only change the cost
///of nodes whose neighborhood changed (the neighbors of `n`) or whose
///neighbors became newly connected (the neighbors of those), so only
///that two-hop ball is recomputed.
#[derive(Clone,Copy,Debug,Default,PartialEq)]
pub struct GreedyMinimumFillin;

impl GreedyMinimumFillin{
    ///Orders the active nodes of `g`, eliminating all of them.
    pub fn order_graph(&self,g : &mut EliminationGraph) -> Vec<usize>{
        let n=g.nnodes();
        let mut costs = vec![Cost::Stale;n];
        let mut perm = Vec::<usize>::with_capacity(g.nactive());
        let mut fill=0;
        let mut recomputed=0;
        log::debug!("minimum fill-in: ordering {} of {} nodes",g.nactive(),n);
        while g.nactive()>0{
            for i in 0..n{
                if !g.is_eliminated(i) && costs[i]==Cost::Stale{
                    costs[i]=Cost::Fresh(g.marginalize_dry_run(i));
                    recomputed+=1;
                }
            }

            let mut best : Option<(usize,usize)> = None;
            for i in 0..n{
                if g.is_eliminated(i){
                    continue;
                }
                if let Cost::Fresh(c) = costs[i]{
                    if best.map_or(true,|(_,bc)| c<bc){
                        best=Some((i,c));
                    }
                }
            }
            let (node,cost) = match best{
                Some(b) => b,
                None => break
            };

            let nbrs = g.neighbors(node).to_vec();
            let added=g.marginalize(node);
            debug_assert_eq!(added,cost);
            log::trace!("minimum fill-in: eliminate {} (fill {})",node,added);
            fill+=added;
            perm.push(node);

            //Neighbor lists now include the new fill edges
            for &m in nbrs.iter(){
                costs[m]=Cost::Stale;
                for &x in g.neighbors(m).iter(){
                    costs[x]=Cost::Stale;
                }
            }
        }
        log::debug!("minimum fill-in: done, total fill-in {}, {} cost evaluations",fill,recomputed);
        perm
    }
}

impl PermutationStrategy for GreedyMinimumFillin{
    fn get_permutation<M : SparseView>(&self,mat : &M) -> Result<Vec<usize>>{
        let mut g = EliminationGraph::new(mat)?;
        Ok(self.order_graph(&mut g))
    }
}
