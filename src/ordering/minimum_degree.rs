use crate::error::Result;
use crate::graph::EliminationGraph;
use crate::ordering::PermutationStrategy;
use crate::sparse::SparseView;

///Repeatedly eliminates the active node with the fewest neighbors.
///Ties go to the lowest node index.
///
///Each step is a full scan over the nodes followed by a marginalization,
///so the cost grows like N*(N + degree^2). Fine for a few thousand
///variables, which is where calibration problems live.
#[derive(Clone,Copy,Debug,Default,PartialEq)]
pub struct ExactMinimumDegree;

impl ExactMinimumDegree{
    ///Orders the active nodes of `g`, eliminating all of them.
    pub fn order_graph(&self,g : &mut EliminationGraph) -> Vec<usize>{
        let n=g.nnodes();
        let mut perm = Vec::<usize>::with_capacity(g.nactive());
        let mut fill=0;
        log::debug!("minimum degree: ordering {} of {} nodes",g.nactive(),n);
        while g.nactive()>0{
            let mut best : Option<(usize,usize)> = None;
            for i in 0..n{
                if g.is_eliminated(i){
                    continue;
                }
                let d=g.degree(i);
                //Strict comparison keeps the first minimum
                if best.map_or(true,|(_,bd)| d<bd){
                    best=Some((i,d));
                }
            }
            if let Some((node,degree)) = best{
                let added=g.marginalize(node);
                log::trace!("minimum degree: eliminate {} (degree {}, fill {})",node,degree,added);
                fill+=added;
                perm.push(node);
            }
        }
        log::debug!("minimum degree: done, total fill-in {}",fill);
        perm
    }
}

impl PermutationStrategy for ExactMinimumDegree{
    fn get_permutation<M : SparseView>(&self,mat : &M) -> Result<Vec<usize>>{
        let mut g = EliminationGraph::new(mat)?;
        Ok(self.order_graph(&mut g))
    }
}

#[cfg(test)]
mod tests {
    use crate::ordering::{PermutationStrategy,ExactMinimumDegree};
    use crate::graph::EliminationGraph;
    use crate::gallery::{path,star,laplace2d,from_edges};
    use crate::sparse::DenseMatrix;
    use crate::utility::{fill_in,is_permutation};
    use crate::error::OrderingError;

    #[test]
    fn mindeg_path5_takes_endpoints(){
        let a = path::<f64>(5);
        let p = ExactMinimumDegree.get_permutation(&a).unwrap();
        assert!(p[0]==0 || p[0]==4);
        //First minimum wins, so the walk goes left to right
        assert_eq!(p,vec![0,1,2,3,4]);
        assert_eq!(fill_in(&a,&p).unwrap(),0);
    }

    #[test]
    fn mindeg_path_each_step_fill_free(){
        let a = path::<f64>(5);
        let p = ExactMinimumDegree.get_permutation(&a).unwrap();
        let mut g = EliminationGraph::new(&a).unwrap();
        for &n in p.iter(){
            assert_eq!(g.marginalize(n),0);
        }
    }

    #[test]
    fn mindeg_star_zero_fill(){
        let a = star::<f64>(8);
        let p = ExactMinimumDegree.get_permutation(&a).unwrap();
        assert!(is_permutation(&p,8));
        assert_eq!(fill_in(&a,&p).unwrap(),0);
        //Centre can only go once a single leaf is left
        let centre = p.iter().position(|&i|i==0).unwrap();
        assert!(centre>=6);
    }

    #[test]
    fn mindeg_tree_zero_fill(){
        //    0
        //   / \
        //  1   2
        // /|   |\
        //3 4   5 6
        //      |
        //      7
        let a = from_edges::<f64>(8,&[(0,1),(0,2),(1,3),(1,4),(2,5),(2,6),(5,7)]);
        let p = ExactMinimumDegree.get_permutation(&a).unwrap();
        assert!(is_permutation(&p,8));
        assert_eq!(fill_in(&a,&p).unwrap(),0);
    }

    #[test]
    fn mindeg_grid_beats_natural_order(){
        let a = laplace2d::<f64>(8,8);
        let p = ExactMinimumDegree.get_permutation(&a).unwrap();
        assert!(is_permutation(&p,64));
        let natural : Vec<usize> = (0..64).collect();
        assert!(fill_in(&a,&p).unwrap() < fill_in(&a,&natural).unwrap());
    }

    #[test]
    fn mindeg_non_square_fails(){
        let d = DenseMatrix::<f64>::zeros(3,4);
        match ExactMinimumDegree.get_permutation(&d){
            Err(OrderingError::InvalidArgument{..}) => {},
            other => panic!("expected InvalidArgument, got {:?}",other)
        }
    }

    #[test]
    fn mindeg_order_graph_skips_eliminated(){
        let mut g = EliminationGraph::from_edges(4,&[(0,1),(1,2),(2,3)]);
        g.marginalize(1);
        let p = ExactMinimumDegree.order_graph(&mut g);
        assert_eq!(p.len(),3);
        assert!(!p.contains(&1));
        assert_eq!(g.nactive(),0);
    }
}
